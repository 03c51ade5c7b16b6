/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authenticated HTTP transport
pub mod http;
/// Request parameter models and query-string construction
pub mod requests;
