pub mod health;
pub mod scanline;
