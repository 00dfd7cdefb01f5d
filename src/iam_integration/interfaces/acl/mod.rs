pub mod iam_authentication_facade;
