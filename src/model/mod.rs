/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Authentication request and response models
pub mod auth;
/// Descriptor table of every remote operation
pub mod endpoint;
/// HTTP transport shared by every operation
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
