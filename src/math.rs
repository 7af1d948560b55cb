pub mod strassen;

pub use strassen::strassen;
