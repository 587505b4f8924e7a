/// One test per fixture asserting the module names it declares, in order.
#[macro_export]
macro_rules! sv_module_tests {
    ($($name:ident => $path:expr => [$($module:expr),* $(,)?]),+ $(,)?) => {
        $(
            #[test]
            fn $name() {
                let harness = $crate::common::TestHarness::default();
                let text = harness.read_fixture($path);
                let expected: Vec<&str> = vec![$($module),*];
                assert_eq!(sv_header::find_modules(&sv_header::sanitize(&text)), expected);
            }
        )+
    };
}

/// One test per fixture asserting the port names of a module, in order.
#[macro_export]
macro_rules! sv_port_name_tests {
    ($($name:ident => $path:expr, $module:expr => [$($port:expr),* $(,)?]),+ $(,)?) => {
        $(
            #[test]
            fn $name() {
                let header = $crate::common::TestHarness::default().module_header($path, $module);
                let expected: Vec<&str> = vec![$($port),*];
                assert_eq!($crate::common::port_names(&header.ports), expected);
            }
        )+
    };
}
