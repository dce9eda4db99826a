#[macro_export]
macro_rules! path {
    (
        $( . $segment:ident )+
    ) => {
        [ $( stringify!($segment), )+ ].into_iter().collect::<$crate::stmt::Path>()
    };
}
