use ahash::AHashMap;

/// A run of `size` identical characters at `a[a_start..]` and `b[b_start..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Ratcliff/Obershelp block matcher over two character sequences.
///
/// `b` is indexed once (character -> ascending positions), so each longest
/// match search only visits positions where the characters agree. Blocks are
/// computed lazily and cached, which lets the ratio and the span extraction
/// share one discovery pass.
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: AHashMap<char, Vec<usize>>,
    blocks: Option<Vec<MatchingBlock>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: AHashMap<char, Vec<usize>> = AHashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        Self { a, b, b2j, blocks: None }
    }

    pub fn a(&self) -> &[char] {
        &self.a
    }

    pub fn b(&self) -> &[char] {
        &self.b
    }

    /// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the run starting earliest in `a`, then earliest in `b`.
    /// Returns a block of size 0 at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let mut best = MatchingBlock { a_start: alo, b_start: blo, size: 0 };

        // j2len[j] = length of the run ending at a[i-1], b[j]
        let mut j2len: AHashMap<usize, usize> = AHashMap::new();
        for i in alo..ahi {
            let mut new_j2len: AHashMap<usize, usize> = AHashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 { j2len.get(&(j - 1)).copied().unwrap_or(0) } else { 0 };
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock { a_start: i + 1 - k, b_start: j + 1 - k, size: k };
                    }
                }
            }
            j2len = new_j2len;
        }

        best
    }

    /// All matching blocks, ordered by position in `a`, adjacent runs merged.
    pub fn matching_blocks(&mut self) -> &[MatchingBlock] {
        if self.blocks.is_none() {
            self.blocks = Some(self.compute_blocks());
        }
        self.blocks.as_deref().unwrap_or(&[])
    }

    fn compute_blocks(&self) -> Vec<MatchingBlock> {
        let mut found = Vec::new();
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a_start && blo < m.b_start {
                pending.push((alo, m.a_start, blo, m.b_start));
            }
            if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
                pending.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
            }
            found.push(m);
        }
        found.sort_by_key(|m| (m.a_start, m.b_start));

        // Recursion can split one run across two calls; stitch those back
        let mut merged: Vec<MatchingBlock> = Vec::with_capacity(found.len());
        for block in found {
            match merged.last_mut() {
                Some(last) if last.a_start + last.size == block.a_start
                    && last.b_start + last.size == block.b_start => {
                    last.size += block.size;
                },
                _ => merged.push(block),
            }
        }
        merged
    }

    /// Number of characters covered by matching blocks.
    pub fn matched_chars(&mut self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// `2 * M / T`; two empty sequences count as identical.
    pub fn ratio(&mut self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / total as f64
    }
}
