pub mod chaos;
pub mod cornflower;
pub mod grayscale;
pub mod violet;
pub mod waves;
