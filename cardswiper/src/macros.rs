#[cfg(feature = "tracing")]
macro_rules! cstrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "cardswiper", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cstrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! csdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "cardswiper", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! csdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! cswarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "cardswiper", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! cswarn {
    ($($tt:tt)*) => {};
}
