pub mod fermat;
pub mod generator;

pub use fermat::is_probably_prime;
pub use generator::generate_prime;
