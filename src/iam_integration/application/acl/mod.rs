pub mod firebase_iam_authentication_facade_impl;
pub mod unconfigured_iam_authentication_facade_impl;
