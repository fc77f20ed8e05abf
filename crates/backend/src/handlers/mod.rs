pub mod a001_offer;
