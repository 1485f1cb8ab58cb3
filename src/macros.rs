#[macro_export]
macro_rules! from_external_error {
    () => {};
    ($head:path) => {
        impl From<$head> for ClientError {
            fn from(err: $head) -> Self { ClientError::Internal(Box::new(err)) }
        }
    };
    ($head:path $(, $tail:path)*) => {
        impl From<$head> for ClientError {
            fn from(err: $head) -> Self { ClientError::Internal(Box::new(err)) }
        }
        from_external_error!($($tail),*);
    };
}
