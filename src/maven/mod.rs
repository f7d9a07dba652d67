//! Maven build descriptors: model, reader and plugin location classifier

pub mod model;
pub mod reader;
pub mod visitor;

pub use model::{Build, Coordinates, Model, Plugin, Profile, Reporting, DEFAULT_PLUGIN_GROUP_ID};
pub use reader::{read_model, DescriptorError};
pub use visitor::{
    browse, classify, Classification, Location, LocationSet, ModelVisitor, PluginIdentity,
    PluginKind,
};
