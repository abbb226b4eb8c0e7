pub mod label_loader;

pub use label_loader::{load_label_batch, load_label_file};
