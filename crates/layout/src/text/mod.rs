pub mod wrapper;

pub use wrapper::wrap_fixed;
