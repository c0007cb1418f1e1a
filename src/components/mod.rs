mod gallery;
mod viewer;

pub use gallery::GalleryScreen;
pub use viewer::ViewerScreen;
