#![allow(dead_code)]

pub mod runs;
