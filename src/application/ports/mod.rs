// src/application/ports/mod.rs
pub mod links;

pub type PageLinksPort = dyn links::PageLinks;
