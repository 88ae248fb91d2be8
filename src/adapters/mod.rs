pub mod filesystem;

pub use filesystem::FilesystemRepository;
