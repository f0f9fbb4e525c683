pub mod bundle;
pub mod dev;
pub mod fmt;
pub mod run;
pub mod testing;
