//! HIR → Thompson NFA
//! 在区间符号上构建带ε边的非确定自动机，作为子集构造的输入

use regex_syntax::hir::{Class, Hir, HirKind};
use rustc_hash::FxHashSet;

use crate::automaton::alphabet::Alphabet;
use crate::error::{PatminError, PatminResult};

/// NFA 单状态：符号转移 + ε转移
#[derive(Debug, Default, Clone)]
pub struct NfaState {
    pub trans: Vec<(usize, usize)>, // (symbol, target)
    pub eps: Vec<usize>,
}

/// Thompson 构造产物，单起点单终点
#[derive(Debug)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: usize,
    pub accept: usize,
}

impl Nfa {
    /// 由HIR构建NFA，字母表必须包含该HIR的全部切分点
    pub fn from_hir(hir: &Hir, alphabet: &Alphabet) -> PatminResult<Nfa> {
        let mut builder = Builder {
            states: Vec::new(),
            alphabet,
        };
        let (start, accept) = builder.compile(hir)?;
        Ok(Nfa {
            states: builder.states,
            start,
            accept,
        })
    }

    /// ε闭包
    pub fn epsilon_closure(&self, set: &FxHashSet<usize>) -> FxHashSet<usize> {
        let mut closure: FxHashSet<usize> = set.clone();
        let mut stack: Vec<usize> = set.iter().copied().collect();
        while let Some(s) = stack.pop() {
            for &t in &self.states[s].eps {
                if closure.insert(t) {
                    stack.push(t);
                }
            }
        }
        closure
    }

    /// 按符号走一步（不含闭包）
    pub fn move_on(&self, set: &FxHashSet<usize>, symbol: usize) -> FxHashSet<usize> {
        let mut out = FxHashSet::default();
        for &s in set {
            for &(sym, t) in &self.states[s].trans {
                if sym == symbol {
                    out.insert(t);
                }
            }
        }
        out
    }
}

struct Builder<'a> {
    states: Vec<NfaState>,
    alphabet: &'a Alphabet,
}

impl<'a> Builder<'a> {
    fn new_state(&mut self) -> usize {
        self.states.push(NfaState::default());
        self.states.len() - 1
    }

    /// 编译一个HIR片段，返回 (start, accept)
    fn compile(&mut self, hir: &Hir) -> PatminResult<(usize, usize)> {
        match hir.kind() {
            HirKind::Empty => {
                let s = self.new_state();
                let a = self.new_state();
                self.states[s].eps.push(a);
                Ok((s, a))
            }
            HirKind::Literal(lit) => {
                let text = std::str::from_utf8(&lit.0).map_err(|_| {
                    PatminError::PatternParseError("non-UTF-8 literal in pattern".into())
                })?;
                let start = self.new_state();
                let mut cur = start;
                for c in text.chars() {
                    let next = self.new_state();
                    let sym = self.alphabet.symbol_of_char(c);
                    self.states[cur].trans.push((sym, next));
                    cur = next;
                }
                Ok((start, cur))
            }
            HirKind::Class(Class::Unicode(cls)) => {
                let s = self.new_state();
                let a = self.new_state();
                for range in cls.ranges() {
                    for sym in self.alphabet.symbols_in_range(range.start(), range.end()) {
                        self.states[s].trans.push((sym, a));
                    }
                }
                Ok((s, a))
            }
            HirKind::Class(Class::Bytes(_)) => Err(PatminError::PatternParseError(
                "byte-oriented class outside the dialect".into(),
            )),
            HirKind::Look(_) => Err(PatminError::PatternParseError(
                "anchor or look-around inside pattern body".into(),
            )),
            HirKind::Repetition(rep) => {
                // min 次展开 + (max-min) 次可选，max 无界时以 star 收尾
                let start = self.new_state();
                let mut cur = start;
                for _ in 0..rep.min {
                    let (s, a) = self.compile(&rep.sub)?;
                    self.states[cur].eps.push(s);
                    cur = a;
                }
                match rep.max {
                    None => {
                        let (s, a) = self.compile(&rep.sub)?;
                        let out = self.new_state();
                        self.states[cur].eps.push(s);
                        self.states[cur].eps.push(out);
                        self.states[a].eps.push(s);
                        self.states[a].eps.push(out);
                        Ok((start, out))
                    }
                    Some(max) => {
                        let out = self.new_state();
                        for _ in rep.min..max {
                            let (s, a) = self.compile(&rep.sub)?;
                            self.states[cur].eps.push(s);
                            self.states[cur].eps.push(out);
                            cur = a;
                        }
                        self.states[cur].eps.push(out);
                        Ok((start, out))
                    }
                }
            }
            HirKind::Capture(cap) => self.compile(&cap.sub),
            HirKind::Concat(subs) => {
                let start = self.new_state();
                let mut cur = start;
                for sub in subs {
                    let (s, a) = self.compile(sub)?;
                    self.states[cur].eps.push(s);
                    cur = a;
                }
                Ok((start, cur))
            }
            HirKind::Alternation(subs) => {
                let start = self.new_state();
                let accept = self.new_state();
                for sub in subs {
                    let (s, a) = self.compile(sub)?;
                    self.states[start].eps.push(s);
                    self.states[a].eps.push(accept);
                }
                Ok((start, accept))
            }
        }
    }
}
