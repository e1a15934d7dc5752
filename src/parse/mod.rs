pub mod ordered_properties;
pub mod properties_parser;
pub mod translation;

pub use ordered_properties::OrderedProperties;
pub use properties_parser::PropertiesParser;
pub use translation::TranslationFile;
