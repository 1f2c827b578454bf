use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use eyre::WrapErr as _;
use log::debug;

use crate::{encode, EncodeOptions, Encoding};

/// 入力ファイル 1 つを出力ファイル 1 つへ変換する単位。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pass {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encoding: Encoding,
    pub with_header: bool,
}

impl Pass {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        encoding: Encoding,
        with_header: bool,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            encoding,
            with_header,
        }
    }

    /// 変換を実行し、書き出した語数を返す。
    ///
    /// ファイルはこの関数内でのみ開かれ、戻る前に必ず閉じられる。
    pub fn run(&self, options: &EncodeOptions) -> eyre::Result<usize> {
        let reader = open_input(&self.input)?;
        let mut writer = create_output(&self.output)?;

        let options = EncodeOptions {
            with_header: options.with_header && self.with_header,
            ..*options
        };
        let words = encode(reader, &mut writer, self.encoding, &options).wrap_err_with(|| {
            format!(
                "failed to convert {} to {}",
                self.input.display(),
                self.output.display()
            )
        })?;
        writer
            .flush()
            .wrap_err_with(|| format!("failed to write output {}", self.output.display()))?;

        debug!(
            "{} -> {} ({}): {} word(s)",
            self.input.display(),
            self.output.display(),
            self.encoding,
            words
        );

        Ok(words)
    }
}

/// 命令・データの 2 イメージから COE と MIF を 2 つずつ作る。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conversion {
    pub code: PathBuf,
    pub data: PathBuf,
    pub inst_coe: PathBuf,
    pub data_coe: PathBuf,
    pub inst_mif: PathBuf,
    pub data_mif: PathBuf,
}

impl Conversion {
    /// inst→COE, data→COE, data→MIF, inst→MIF の順。
    pub fn passes(&self) -> [Pass; 4] {
        [
            Pass::new(&self.code, &self.inst_coe, Encoding::Hex, true),
            Pass::new(&self.data, &self.data_coe, Encoding::Hex, true),
            Pass::new(&self.data, &self.data_mif, Encoding::Binary, false),
            Pass::new(&self.code, &self.inst_mif, Encoding::Binary, false),
        ]
    }

    /// 各パスを順に実行する。最初のエラーで中断。
    pub fn run(&self, options: &EncodeOptions) -> eyre::Result<()> {
        for pass in self.passes().iter() {
            pass.run(options)?;
        }
        Ok(())
    }
}

fn open_input(path: &Path) -> eyre::Result<BufReader<File>> {
    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open input {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn create_output(path: &Path) -> eyre::Result<BufWriter<File>> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create output {}", path.display()))?;
    Ok(BufWriter::new(file))
}
