pub mod rest;
pub mod storage;
