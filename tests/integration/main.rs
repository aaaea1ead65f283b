//! End-to-end HTTP tests driven through the router.

mod helpers;

mod file_test;
mod folder_test;
mod health_test;
