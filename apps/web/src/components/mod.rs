pub(crate) mod layout;
pub(crate) mod sections;
mod structured_data;
pub(crate) mod ui;

pub(crate) use structured_data::StructuredData;
