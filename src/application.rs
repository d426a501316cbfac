pub mod check_service;
