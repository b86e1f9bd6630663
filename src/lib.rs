//! This crate implements code for converting between the parameters of the Yule (pure-birth)
//! model of phylogenetic tree growth.

#[macro_use]
extern crate clap;

pub mod app;
pub mod yule;
