pub mod mock_auth_service;
pub mod session_store;
