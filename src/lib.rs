mod convert;
mod decode;
mod encode;
mod word;

pub use convert::*;
pub use decode::*;
pub use encode::*;
pub use word::*;

/// COE ヘッダ。16 進出力のデータ行の前に 1 度だけ書く。
pub const COE_HEADER: [&str; 2] = [
    "memory_initialization_radix = 16;",
    "memory_initialization_vector =",
];
