use bytes::Bytes;

use super::writer::ResponseWriter;

/// Inbound request as seen by every handler in the chain.
pub type Request = http::Request<Bytes>;

/// A request handler in a composition chain.
///
/// `serve` owns the whole response: it may read the request body and write
/// status, headers and body through `res` before returning. Implementations
/// are shared across threads, so they must be `Send + Sync`.
pub trait Handler: Send + Sync {
    fn serve(&self, req: &Request, res: &mut dyn ResponseWriter);
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut dyn ResponseWriter) + Send + Sync,
{
    fn serve(&self, req: &Request, res: &mut dyn ResponseWriter) {
        self(req, res)
    }
}
