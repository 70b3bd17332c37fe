/// Unwraps the `Err` side of a result, panicking with the `Ok` value otherwise.
///
/// Extra arguments are formatted and appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(v) => {
                let context = String::new() $( + ", " + &format!($($t)*) )?;
                panic!("expected `Err`; actual=Ok({:?}){}", v, context);
            }
        }
    };
}

/// Unwraps the `Ok` side of a result, panicking with the error's `Display`
/// otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
