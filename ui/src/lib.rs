mod hero;
mod navbar;

pub use hero::Hero;
pub use navbar::Navbar;
