pub mod mock_server;
pub mod value;
