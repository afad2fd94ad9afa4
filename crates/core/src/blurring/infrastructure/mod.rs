pub mod neighborhood_blurrer;
