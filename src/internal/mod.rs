pub mod growable;
