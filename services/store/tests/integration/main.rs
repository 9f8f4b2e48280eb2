mod catalog_test;
mod helpers;
