//! Shared test constants and helpers for integration tests.

/// A small personal bibliography: three articles, one book, one misc entry.
///
/// In source order the articles are dated 2019, 2021 and (undated); the 2019
/// and undated ones have the target author first.
pub const REFERENCES: &str = "\
% Exported from Zotero

@article{johnson2019,
  title = {Sediment Transport in Braided Rivers},
  author = {Johnson, Emily and Smith, John},
  date = {2019-05-14},
  journaltitle = {Water Resources Research},
}

@book{smith2020,
  title = {Rivers},
  author = {Smith, John},
  date = {2020},
}

@Article{lee2021,
  title = {Floodplain Dynamics},
  author = {Lee, Kim and Johnson, E. K.},
  date = {2021},
}

@misc{talk2022,
  title = {Invited Talk},
  date = {2022},
}

@article{johnson-preprint,
  title = {Unpublished Notes},
  author = {Johnson, E. K.},
}
";

/// Splits a written bibliography back into its entries.
pub fn written_entries(bib: &str) -> Vec<&str> {
    bib.split("\n\n").filter(|s| !s.is_empty()).collect()
}
