// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bikeshare_domain::TripRecord;

/// How many records a sample page holds unless the caller says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A lazy, finite iterator of fixed-size record pages.
///
/// Nothing beyond the requested page is computed: the consumer decides after
/// each page whether to pull the next one, and dropping the iterator leaks
/// nothing. Restart by calling [`paginate`] again with the same records.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    /// The underlying chunk iterator over the record slice.
    chunks: std::slice::Chunks<'a, TripRecord>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [TripRecord];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

/// Splits a record set into pages of `page_size` records.
///
/// The final page holds whatever remains and may be short. A `page_size` of
/// zero is treated as one record per page.
#[must_use]
pub fn paginate(records: &[TripRecord], page_size: usize) -> Pages<'_> {
    Pages {
        chunks: records.chunks(page_size.max(1)),
    }
}
