use serde::de::DeserializeOwned;

pub(crate) mod open_library;

use crate::{Error, ErrorKind};

/// Capability for fetching JSON documents over HTTP.
///
/// Pipelines are generic over this trait so tests can substitute canned
/// responses for the real network.
pub trait Client
where
    Self: Default,
{
    /// Fetches `url` and deserializes the response body as JSON.
    ///
    /// # Errors
    ///
    /// An `Err` of [`ErrorKind::Io`] when the request fails and of
    /// [`ErrorKind::Deserialize`] when the body is not valid JSON for `T`.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::Io, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_no_url, assert_url, impl_json_producer, MockClient, NetworkErrorProducer, Producer,
    URL_SINK,
};

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Option<String>> = std::cell::RefCell::new(None);
    }

    /// Asserts that the expected URL is the same as the one provided to the [`MockClient`].
    ///
    /// The [`MockClient`] updates the thread local `URL_SINK` with the URL string that was
    /// passed to it, which allows asserting that calling functions built the correct URL.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    /// Asserts that no request reached the [`MockClient`] at all.
    ///
    /// The sink is thread local and tests run one per thread, so an empty
    /// sink means the function under test returned before issuing a request.
    macro_rules! assert_no_url {
        () => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone());
            assert_eq!(None, url);
        };
    }

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer<String> = EmptyJsonProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer<String>> Client for MockClient<P> {
        fn get_json<T>(&self, url: &str) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            P::produce().and_then(|json| {
                serde_json::from_str(&json).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
            })
        }
    }

    macro_rules! impl_json_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<String> for $producer {
                    fn produce() -> Result<String, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_json_producer! {
        EmptyJsonProducer => Ok("{}".to_owned()),
        NetworkErrorProducer => Err(Error::new(ErrorKind::Io, "Network error")),
    }

    pub(crate) use assert_no_url;
    pub(crate) use assert_url;
    pub(crate) use impl_json_producer;
}
