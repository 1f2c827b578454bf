use std::path::PathBuf;

use structopt::StructOpt;

use bin2mem::{Conversion, EncodeOptions, Padding};

/// 生バイナリのメモリイメージを COE (16 進) と MIF (2 進) に変換する。
#[derive(Debug, StructOpt)]
#[structopt(name = "convert")]
struct Opt {
    /// 旧実装と同じ出力 (部分語は前の語の残りで埋め、4 バイト境界で終わると最終語を重複出力)
    #[structopt(long, conflicts_with = "fill")]
    legacy: bool,

    /// 部分語の埋め草バイト [default: 0x00]
    #[structopt(long, parse(try_from_str=parse_int::parse))]
    fill: Option<u8>,

    /// COE ヘッダを出力しない
    #[structopt(long)]
    no_header: bool,

    #[structopt(parse(from_os_str))]
    code_bin: PathBuf,

    #[structopt(parse(from_os_str))]
    code_data: PathBuf,

    #[structopt(parse(from_os_str))]
    inst_coe: PathBuf,

    #[structopt(parse(from_os_str))]
    data_coe: PathBuf,

    #[structopt(parse(from_os_str))]
    inst_mif: PathBuf,

    #[structopt(parse(from_os_str))]
    data_mif: PathBuf,
}

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opt = Opt::from_args();

    let mut options = if opt.legacy {
        EncodeOptions::legacy()
    } else {
        EncodeOptions {
            padding: Padding::Fill(opt.fill.unwrap_or(0x00)),
            ..EncodeOptions::default()
        }
    };
    options.with_header = !opt.no_header;

    let conv = Conversion {
        code: opt.code_bin,
        data: opt.code_data,
        inst_coe: opt.inst_coe,
        data_coe: opt.data_coe,
        inst_mif: opt.inst_mif,
        data_mif: opt.data_mif,
    };
    conv.run(&options)?;

    Ok(())
}
