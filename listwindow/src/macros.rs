#[cfg(feature = "tracing")]
macro_rules! lw_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lw_trace {
    ($($tt:tt)*) => {};
}
