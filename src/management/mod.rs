mod genres;

pub use genres::GenreCatalogManager;
