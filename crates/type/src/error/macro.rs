// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tessera

/// Wraps anything implementing `IntoDiagnostic` into an `Error`.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error::new($diagnostic)
	};
}

/// Returns early with an `Error` built from the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

/// Creates an internal error diagnostic with automatic source location capture
#[macro_export]
macro_rules! internal {
    ($reason:expr) => {
        $crate::error::internal_with_context(
            $reason,
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::internal_with_context(
            format!($fmt, $($arg)*),
            file!(),
            line!(),
            column!(),
            {
                fn f() {}
                fn type_name_of<T>(_: T) -> &'static str {
                    std::any::type_name::<T>()
                }
                let name = type_name_of(f);
                &name[..name.len() - 3]
            },
            module_path!()
        )
    };
}

/// Returns early with an internal error
#[macro_export]
macro_rules! return_internal_error {
    ($($arg:tt)*) => {
        return Err($crate::error!($crate::internal!($($arg)*)))
    };
}
