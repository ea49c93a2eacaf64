//! complicated 批次的工作线程池
//! 任务/结果双通道 + 固定 worker 数，比较快照整批冻结，任一失败整批中止

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{PatminError, PatminResult};
use crate::reducer::complicated::{check_word, task_key, CandidateSet};

/// 任务通道消息：待检查的 word，或 worker 关闭哨兵
enum Task {
    Word(String),
    Shutdown,
}

type WordOutcome = PatminResult<(String, Option<String>)>;

/// 检查被其他 complicated 模式覆盖的冗余 complicated 模式
///
/// CPU密集型任务，分发到固定大小的线程池并行执行。
/// 所有 worker 读同一份冻结快照，已判冗余的模式不从快照移除，
/// 避免比较目标在批次中途变化。
pub fn reduce_complicated(complicated: &FxHashSet<String>) -> PatminResult<FxHashSet<String>> {
    log::info!("Checking {} complicated patterns...", complicated.len());

    let snapshot = Arc::new(CandidateSet::build(complicated)?);

    // 短模式检查更便宜也更容易被已处理的模式覆盖，升序入队
    let mut tasks: Vec<String> = complicated.iter().cloned().collect();
    tasks.sort_by(|a, b| task_key(a).cmp(&task_key(b)));
    let task_order = tasks.clone();

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        .saturating_sub(1)
        .max(1);
    log::debug!("Spawning {workers} workers for {} tasks", tasks.len());

    let covers = run_pool(tasks, snapshot, workers)?;
    let redundant = resolve_redundant(&task_order, &covers);
    for word in &redundant {
        if let Some(Some(cover)) = covers.get(word) {
            log::debug!("{word} is a subset of {cover}");
        }
    }
    Ok(redundant)
}

/// 派发任务并收集全部结果，每个任务恰好对应一条结果
fn run_pool(
    tasks: Vec<String>,
    snapshot: Arc<CandidateSet>,
    workers: usize,
) -> PatminResult<FxHashMap<String, Option<String>>> {
    let task_count = tasks.len();
    let (task_tx, task_rx) = mpsc::channel::<Task>();
    let task_rx = Arc::new(Mutex::new(task_rx));
    let (result_tx, result_rx) = mpsc::channel::<WordOutcome>();

    for word in tasks {
        task_tx
            .send(Task::Word(word))
            .map_err(|e| PatminError::WorkerError(format!("task enqueue failed: {e}")))?;
    }
    for _ in 0..workers {
        task_tx
            .send(Task::Shutdown)
            .map_err(|e| PatminError::WorkerError(format!("sentinel enqueue failed: {e}")))?;
    }
    drop(task_tx);

    thread::scope(|scope| {
        for _ in 0..workers {
            let rx = Arc::clone(&task_rx);
            let tx = result_tx.clone();
            let snapshot = Arc::clone(&snapshot);
            scope.spawn(move || worker_loop(&rx, &tx, &snapshot));
        }
        drop(result_tx);

        let mut covers: FxHashMap<String, Option<String>> = FxHashMap::default();
        for _ in 0..task_count {
            match result_rx.recv() {
                Ok(Ok((word, cover))) => {
                    covers.insert(word, cover);
                }
                // worker 的失败原样转发到这里，整批中止，不保留部分结果
                Ok(Err(e)) => return Err(e),
                Err(_) => {
                    return Err(PatminError::PoolChannelClosed(
                        "a worker exited without reporting its result".into(),
                    ))
                }
            }
        }
        Ok(covers)
    })
}

/// worker 主循环：取任务→全量三层检查→回传结果，哨兵即退出
fn worker_loop(
    task_rx: &Arc<Mutex<Receiver<Task>>>,
    result_tx: &Sender<WordOutcome>,
    snapshot: &CandidateSet,
) {
    loop {
        let task = {
            let Ok(guard) = task_rx.lock() else { return };
            guard.recv()
        };
        match task {
            Ok(Task::Word(word)) => {
                let outcome = check_word(&word, snapshot).map(|cover| (word, cover));
                // 协调端提前中止后通道关闭，直接退出
                if result_tx.send(outcome).is_err() {
                    return;
                }
            }
            Ok(Task::Shutdown) | Err(_) => return,
        }
    }
}

/// 覆盖链求解：决定哪些 word 真正移除
///
/// 链终点是无覆盖方的存活模式 → word 冗余；
/// 链进入等价环 → 环上成员语言相互覆盖，只保留任务序最早者。
/// 原始快照冻结保证链上每一步的语言都覆盖 word，移除总是安全的。
fn resolve_redundant(
    task_order: &[String],
    covers: &FxHashMap<String, Option<String>>,
) -> FxHashSet<String> {
    let mut redundant = FxHashSet::default();
    for word in task_order {
        let Some(Some(first_cover)) = covers.get(word) else {
            continue;
        };
        let mut path: Vec<&str> = vec![word.as_str()];
        let mut cursor: Option<&str> = Some(first_cover.as_str());
        loop {
            match cursor {
                None => {
                    redundant.insert(word.clone());
                    break;
                }
                Some(current) => {
                    if let Some(pos) = path.iter().position(|&p| p == current) {
                        let cycle = &path[pos..];
                        let keeper = cycle.iter().copied().min_by_key(|p| task_key(p));
                        if keeper != Some(word.as_str()) {
                            redundant.insert(word.clone());
                        }
                        break;
                    }
                    path.push(current);
                    cursor = covers.get(current).and_then(|c| c.as_deref());
                }
            }
        }
    }
    redundant
}
