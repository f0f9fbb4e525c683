mod chrome;
mod footer;
mod header;

pub(crate) use chrome::SiteChrome;
pub(crate) use footer::Footer;
pub(crate) use header::Header;
