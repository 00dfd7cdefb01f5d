pub mod authenticated_user_id;
