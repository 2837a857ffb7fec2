//! Minimal HTML for gate responses.
//!
//! Rendering stays out of the gate itself; these helpers are the
//! presentation collaborator the challenge delegates to.

/// Access-denied notice rendered under the 401 challenge.
#[must_use]
pub fn access_denied(title: &str, login_url: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Access denied!</title></head>\n\
         <body id=\"loginform\">\n\
         <h1>Welcome to {title}</h1>\n\
         <h3>Wrong username/password. Access denied.</h3>\n\
         <p><a href=\"{login_url}\">Retry login</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Landing page for a validated request.
#[must_use]
pub fn welcome(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>{title}</title></head>\n\
         <body>\n\
         <h1>Welcome to {title}</h1>\n\
         </body>\n\
         </html>\n"
    )
}

/// Error page for a fatal downstream failure, message surfaced verbatim.
#[must_use]
pub fn fatal_error(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Error</title></head>\n\
         <body>\n\
         <h1>Error</h1>\n\
         <p>{message}</p>\n\
         </body>\n\
         </html>\n"
    )
}
