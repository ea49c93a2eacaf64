//! 子集构造 + 最小化 + 同构比较
//! DFA 为全函数（含显式死状态），最小化后同语言的两个DFA必然同构

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::automaton::nfa::Nfa;

/// 确定自动机，转移表按 state * alphabet_len + symbol 平铺
#[derive(Debug, Clone)]
pub struct Dfa {
    trans: Vec<usize>,
    accepting: Vec<bool>,
    start: usize,
    alphabet_len: usize,
}

impl Dfa {
    /// 子集构造，产出全函数DFA（缺失转移补到死状态）
    pub fn from_nfa(nfa: &Nfa, alphabet_len: usize) -> Dfa {
        let mut state_map: FxHashMap<BTreeSet<usize>, usize> = FxHashMap::default();
        let mut sets: Vec<BTreeSet<usize>> = Vec::new();
        let mut trans: Vec<usize> = Vec::new();
        let mut accepting: Vec<bool> = Vec::new();

        let mut seed = FxHashSet::default();
        seed.insert(nfa.start);
        let initial: BTreeSet<usize> = nfa.epsilon_closure(&seed).into_iter().collect();

        // 死状态固定占用 0 号，初始状态为 1 号
        let dead = 0;
        sets.push(BTreeSet::new());
        accepting.push(false);
        state_map.insert(initial.clone(), 1);
        accepting.push(initial.contains(&nfa.accept));
        sets.push(initial);

        let mut worklist: Vec<usize> = vec![1];
        trans.resize(2 * alphabet_len, dead);

        while let Some(idx) = worklist.pop() {
            let current: FxHashSet<usize> = sets[idx].iter().copied().collect();
            for symbol in 0..alphabet_len {
                let moved = nfa.move_on(&current, symbol);
                if moved.is_empty() {
                    continue;
                }
                let closed: BTreeSet<usize> =
                    nfa.epsilon_closure(&moved).into_iter().collect();
                let target = match state_map.get(&closed) {
                    Some(&t) => t,
                    None => {
                        let t = sets.len();
                        state_map.insert(closed.clone(), t);
                        accepting.push(closed.contains(&nfa.accept));
                        sets.push(closed);
                        trans.resize((t + 1) * alphabet_len, dead);
                        worklist.push(t);
                        t
                    }
                };
                trans[idx * alphabet_len + symbol] = target;
            }
        }

        Dfa {
            trans,
            accepting,
            start: 1,
            alphabet_len,
        }
    }

    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting[state]
    }

    pub fn next_state(&self, state: usize, symbol: usize) -> usize {
        self.trans[state * self.alphabet_len + symbol]
    }

    pub fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    /// 整串模拟
    pub fn accepts_symbols<I: IntoIterator<Item = usize>>(&self, symbols: I) -> bool {
        let mut state = self.start;
        for symbol in symbols {
            state = self.next_state(state, symbol);
        }
        self.accepting[state]
    }

    /// 可达且能抵达接受态的状态集合（死路径剪枝用）
    pub fn co_reachable(&self) -> Vec<bool> {
        // 逆向BFS：从接受态沿入边回溯
        let n = self.state_count();
        let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
        for state in 0..n {
            for symbol in 0..self.alphabet_len {
                incoming[self.next_state(state, symbol)].push(state);
            }
        }
        let mut alive = vec![false; n];
        let mut queue: Vec<usize> = (0..n).filter(|&s| self.accepting[s]).collect();
        for &s in &queue {
            alive[s] = true;
        }
        while let Some(s) = queue.pop() {
            for &p in &incoming[s] {
                if !alive[p] {
                    alive[p] = true;
                    queue.push(p);
                }
            }
        }
        alive
    }

    /// 划分细化最小化，保持全函数性质
    pub fn minimize(&self) -> Dfa {
        let n = self.state_count();
        let mut partition_of: Vec<usize> = self
            .accepting
            .iter()
            .map(|&acc| if acc { 1 } else { 0 })
            .collect();
        let mut partition_count = 2;
        // 全不接受或全接受时初始划分只有一块
        if self.accepting.iter().all(|&a| !a) || self.accepting.iter().all(|&a| a) {
            partition_of.iter_mut().for_each(|p| *p = 0);
            partition_count = 1;
        }

        loop {
            // 签名 = (所在块, 各符号转移目标所在块)
            let mut sig_map: FxHashMap<Vec<usize>, usize> = FxHashMap::default();
            let mut next_partition: Vec<usize> = vec![0; n];
            for state in 0..n {
                let mut sig = Vec::with_capacity(self.alphabet_len + 1);
                sig.push(partition_of[state]);
                for symbol in 0..self.alphabet_len {
                    sig.push(partition_of[self.next_state(state, symbol)]);
                }
                let next_id = sig_map.len();
                let id = *sig_map.entry(sig).or_insert(next_id);
                next_partition[state] = id;
            }
            let next_count = sig_map.len();
            if next_count == partition_count {
                partition_of = next_partition;
                break;
            }
            partition_of = next_partition;
            partition_count = next_count;
        }

        let mut trans = vec![0usize; partition_count * self.alphabet_len];
        let mut accepting = vec![false; partition_count];
        for state in 0..n {
            let p = partition_of[state];
            accepting[p] = self.accepting[state];
            for symbol in 0..self.alphabet_len {
                trans[p * self.alphabet_len + symbol] =
                    partition_of[self.next_state(state, symbol)];
            }
        }

        Dfa {
            trans,
            accepting,
            start: partition_of[self.start],
            alphabet_len: self.alphabet_len,
        }
    }

    /// 最小化DFA同构判定：起点出发并行遍历，状态一一对应且接受标记一致
    pub fn is_isomorphic(&self, other: &Dfa) -> bool {
        if self.alphabet_len != other.alphabet_len
            || self.state_count() != other.state_count()
        {
            return false;
        }
        let mut mapping: FxHashMap<usize, usize> = FxHashMap::default();
        let mut reverse: FxHashMap<usize, usize> = FxHashMap::default();
        let mut queue = vec![(self.start, other.start)];
        mapping.insert(self.start, other.start);
        reverse.insert(other.start, self.start);
        while let Some((a, b)) = queue.pop() {
            if self.accepting[a] != other.accepting[b] {
                return false;
            }
            for symbol in 0..self.alphabet_len {
                let na = self.next_state(a, symbol);
                let nb = other.next_state(b, symbol);
                match (mapping.get(&na), reverse.get(&nb)) {
                    (None, None) => {
                        mapping.insert(na, nb);
                        reverse.insert(nb, na);
                        queue.push((na, nb));
                    }
                    (Some(&mb), Some(&ra)) => {
                        if mb != nb || ra != na {
                            return false;
                        }
                    }
                    _ => return false,
                }
            }
        }
        true
    }
}
