pub mod io;
pub mod ops;
pub mod u8;

pub use self::io::GrayImageU8;
pub use self::u8::ImageU8;
