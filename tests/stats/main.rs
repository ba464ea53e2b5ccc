#![allow(dead_code)]

mod helpers;

mod derived_stats;
