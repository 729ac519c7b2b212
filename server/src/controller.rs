use std::future::IntoFuture;

/// Turns a wire-level request into the input a service expects.
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns a service result into a wire-level response.
pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Pairs a request transformer with a presenter around one service call.
pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    /// Transforms `input`, hands it to the service closure, and presents
    /// whatever comes back. Errors pass through untouched.
    pub async fn handle<I, D, O, F, Fut, E>(self, input: I, f: F) -> Result<P::To, E>
    where
        T: Intake<I, To = D>,
        P: Exhaust<O>,
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        let transformed = self.transformer.emit(input);
        Ok(self.presenter.emit(f(transformed).await?))
    }
}
