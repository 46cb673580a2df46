//! PERT / critical path scheduling.
//!
//! A project is an ordered list of [`Task`]s; that order is used whenever
//! tasks are reported.  [`schedule`] validates the project, orders it with
//! Kahn's algorithm, then runs the forward pass (earliest start and finish)
//! and the backward pass (latest start and finish).

use std::{
    collections::{HashMap, VecDeque},
    fmt,
};

use crate::tracing_support::{debug_event, engine_span};

/// Slack at or below this magnitude counts as zero.
pub const SLACK_TOLERANCE: f64 = 1e-9;

/// A unit of work in a project.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub duration: f64,
    /// Ids of the tasks that must finish before this one starts.
    pub predecessors: Vec<String>,
    /// An optional human-readable description.
    pub name: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            duration,
            predecessors: Vec::new(),
            name: None,
        }
    }

    /// Adds predecessors to the task.
    pub fn after<S: Into<String>>(mut self, predecessors: impl IntoIterator<Item = S>) -> Self {
        self.predecessors
            .extend(predecessors.into_iter().map(Into::into));
        self
    }

    /// Sets the display name of the task.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Reasons a project cannot be scheduled.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("project has no tasks")]
    EmptyProject,
    #[error("task {0} is defined more than once")]
    DuplicateTask(String),
    #[error("task {task} has invalid duration {duration}")]
    InvalidDuration { task: String, duration: f64 },
    #[error("total task duration exceeds the largest representable time")]
    DurationOverflow,
    #[error("task {task} depends on unknown task {predecessor}")]
    UnknownPredecessor { task: String, predecessor: String },
    #[error("dependency cycle among tasks: {}", tasks.join(", "))]
    DependencyCycle { tasks: Vec<String> },
}

/// The computed dates of one task.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskTiming {
    pub id: String,
    pub name: Option<String>,
    pub duration: f64,
    pub predecessors: Vec<String>,
    pub earliest_start: f64,
    pub earliest_finish: f64,
    pub latest_start: f64,
    pub latest_finish: f64,
    pub slack: f64,
}

impl TaskTiming {
    /// Returns true if delaying the task delays the whole project.
    pub fn is_critical(&self) -> bool {
        self.slack.abs() <= SLACK_TOLERANCE
    }
}

/// A fully computed project schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    tasks: Vec<TaskTiming>,
    order: Vec<String>,
    duration: f64,
}

impl Schedule {
    /// Returns the earliest time at which every task can be finished.
    pub fn project_duration(&self) -> f64 {
        self.duration
    }

    /// Returns the timings in project order.
    pub fn tasks(&self) -> &[TaskTiming] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&TaskTiming> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the ids of the critical tasks, in project order.
    pub fn critical_path(&self) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|t| t.is_critical())
            .map(|t| t.id.as_str())
            .collect()
    }

    /// Returns the task ids in the topological order used for the passes.
    pub fn topological_order(&self) -> &[String] {
        &self.order
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tasks.iter().map(|t| t.id.len()).max().unwrap_or(0).max(4);
        writeln!(
            f,
            "{:width$} {:>8} {:>8} {:>8} {:>8}",
            "task", "duration", "ES", "LF", "slack"
        )?;
        for t in &self.tasks {
            write!(
                f,
                "{:width$} {:>8} {:>8} {:>8} {:>8}",
                t.id, t.duration, t.earliest_start, t.latest_finish, t.slack
            )?;
            if t.is_critical() {
                write!(f, " *")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "critical path: {}", self.critical_path().join(" -> "))?;
        write!(f, "project duration: {}", self.duration)
    }
}

/// Validated task graph: indices into the task slice, with deduplicated
/// predecessor and successor lists.
struct TaskGraph {
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    order: Vec<usize>,
}

impl TaskGraph {
    fn build(tasks: &[Task]) -> Result<Self, ValidationError> {
        if tasks.is_empty() {
            return Err(ValidationError::EmptyProject);
        }

        let mut index = HashMap::with_capacity(tasks.len());
        for (i, task) in tasks.iter().enumerate() {
            if index.insert(task.id.as_str(), i).is_some() {
                return Err(ValidationError::DuplicateTask(task.id.clone()));
            }
        }

        if let Some(task) = tasks
            .iter()
            .find(|t| !t.duration.is_finite() || t.duration < 0.0)
        {
            return Err(ValidationError::InvalidDuration {
                task: task.id.clone(),
                duration: task.duration,
            });
        }
        // Every finish date is bounded by the sum of all durations.
        if !tasks.iter().map(|t| t.duration).sum::<f64>().is_finite() {
            return Err(ValidationError::DurationOverflow);
        }

        let mut predecessors = Vec::with_capacity(tasks.len());
        for task in tasks {
            let mut preds = Vec::with_capacity(task.predecessors.len());
            for p in &task.predecessors {
                let &i = index.get(p.as_str()).ok_or_else(|| {
                    ValidationError::UnknownPredecessor {
                        task: task.id.clone(),
                        predecessor: p.clone(),
                    }
                })?;
                if !preds.contains(&i) {
                    preds.push(i);
                }
            }
            predecessors.push(preds);
        }

        let mut successors = vec![Vec::new(); tasks.len()];
        for (i, preds) in predecessors.iter().enumerate() {
            for &p in preds {
                successors[p].push(i);
            }
        }

        // Kahn's algorithm, seeded in project order.
        let mut in_degree = predecessors.iter().map(Vec::len).collect::<Vec<_>>();
        let mut queue = (0..tasks.len())
            .filter(|&i| in_degree[i] == 0)
            .collect::<VecDeque<_>>();
        let mut order = Vec::with_capacity(tasks.len());
        while let Some(i) = queue.pop_front() {
            order.push(i);
            for &s in &successors[i] {
                in_degree[s] -= 1;
                if in_degree[s] == 0 {
                    queue.push_back(s);
                }
            }
        }

        if order.len() < tasks.len() {
            let tasks = tasks
                .iter()
                .zip(&in_degree)
                .filter(|&(_, &d)| d > 0)
                .map(|(t, _)| t.id.clone())
                .collect::<Vec<_>>();
            debug_event!(?tasks, "dependency cycle");
            return Err(ValidationError::DependencyCycle { tasks });
        }

        Ok(Self {
            predecessors,
            successors,
            order,
        })
    }
}

/// Validates a project and returns its task ids in a dependency-respecting
/// order.  Ties are broken by project order.
pub fn topological_order(tasks: &[Task]) -> Result<Vec<String>, ValidationError> {
    let graph = TaskGraph::build(tasks)?;
    Ok(graph.order.into_iter().map(|i| tasks[i].id.clone()).collect())
}

/// Computes the schedule of a project.
///
/// Validation stops at the first problem found, checking in turn for an
/// empty project, duplicate ids, invalid durations, unknown predecessors and
/// dependency cycles.
pub fn schedule(tasks: &[Task]) -> Result<Schedule, ValidationError> {
    let _span = engine_span!("pert", tasks = tasks.len());
    let graph = TaskGraph::build(tasks)?;
    let n = tasks.len();

    let mut earliest_start = vec![0.0; n];
    let mut earliest_finish = vec![0.0; n];
    for &i in &graph.order {
        earliest_start[i] = graph.predecessors[i]
            .iter()
            .map(|&p| earliest_finish[p])
            .fold(0.0, f64::max);
        earliest_finish[i] = earliest_start[i] + tasks[i].duration;
    }
    let duration = earliest_finish.iter().copied().fold(0.0, f64::max);

    let mut latest_start = vec![0.0; n];
    let mut latest_finish = vec![0.0; n];
    for &i in graph.order.iter().rev() {
        latest_finish[i] = graph.successors[i]
            .iter()
            .map(|&s| latest_start[s])
            .fold(duration, f64::min);
        latest_start[i] = latest_finish[i] - tasks[i].duration;
    }

    let timings = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| TaskTiming {
            id: task.id.clone(),
            name: task.name.clone(),
            duration: task.duration,
            predecessors: graph.predecessors[i]
                .iter()
                .map(|&p| tasks[p].id.clone())
                .collect(),
            earliest_start: earliest_start[i],
            earliest_finish: earliest_finish[i],
            latest_start: latest_start[i],
            latest_finish: latest_finish[i],
            slack: latest_start[i] - earliest_start[i],
        })
        .collect();

    let result = Schedule {
        tasks: timings,
        order: graph.order.iter().map(|&i| tasks[i].id.clone()).collect(),
        duration,
    };
    debug_event!(duration, critical = ?result.critical_path(), "project scheduled");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn test_two_task_chain() {
        let tasks = [Task::new("A", 3.0), Task::new("B", 4.0).after(["A"])];
        let result = schedule(&tasks).unwrap();
        assert_eq!(result.project_duration(), 7.0);
        assert_eq!(result.critical_path(), ["A", "B"]);
        let b = result.task("B").unwrap();
        assert_eq!((b.earliest_start, b.latest_finish), (3.0, 7.0));
    }

    #[test]
    fn test_house_construction() {
        let result = schedule(&demo::house_construction()).unwrap();
        assert_eq!(result.project_duration(), 13.0);
        assert_eq!(result.critical_path(), ["A", "B", "D", "F"]);
        assert_eq!(result.task("C").unwrap().slack, 1.0);
        assert_eq!(result.task("E").unwrap().slack, 1.0);
        let f = result.task("F").unwrap();
        assert_eq!(f.earliest_start, 12.0);
        assert_eq!(f.predecessors, ["D", "E"]);
    }

    #[test]
    fn test_parallel_tasks() {
        let tasks = [
            Task::new("A", 2.0),
            Task::new("B", 5.0),
            Task::new("C", 1.0).after(["A", "B"]),
        ];
        let result = schedule(&tasks).unwrap();
        assert_eq!(result.project_duration(), 6.0);
        assert_eq!(result.critical_path(), ["B", "C"]);
        assert_eq!(result.task("A").unwrap().slack, 3.0);
    }

    #[test]
    fn test_order_is_independent_of_listing() {
        let tasks = [
            Task::new("C", 1.0).after(["B"]),
            Task::new("B", 2.0).after(["A"]),
            Task::new("A", 3.0),
        ];
        assert_eq!(topological_order(&tasks).unwrap(), ["A", "B", "C"]);
        let result = schedule(&tasks).unwrap();
        assert_eq!(result.project_duration(), 6.0);
        assert_eq!(result.critical_path(), ["C", "B", "A"]);
        assert_eq!(result.topological_order(), ["A", "B", "C"]);
    }

    #[test]
    fn test_zero_duration_and_repeated_predecessor() {
        let tasks = [
            Task::new("start", 0.0),
            Task::new("work", 2.5).after(["start", "start"]),
        ];
        let result = schedule(&tasks).unwrap();
        assert_eq!(result.project_duration(), 2.5);
        assert_eq!(result.task("work").unwrap().predecessors, ["start"]);
    }

    #[test]
    fn test_empty_project() {
        assert_eq!(schedule(&[]), Err(ValidationError::EmptyProject));
    }

    #[test]
    fn test_duplicate_task() {
        let tasks = [Task::new("A", 1.0), Task::new("A", 2.0)];
        assert_eq!(
            schedule(&tasks),
            Err(ValidationError::DuplicateTask("A".to_string()))
        );
    }

    #[test]
    fn test_invalid_durations() {
        for duration in [-1.0, f64::NAN, f64::INFINITY] {
            let tasks = [Task::new("A", 1.0), Task::new("B", duration)];
            let err = schedule(&tasks).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidDuration { ref task, .. } if task == "B"),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_durations_that_overflow() {
        let tasks = [
            Task::new("A", f64::MAX),
            Task::new("B", f64::MAX).after(["A"]),
        ];
        assert_eq!(schedule(&tasks), Err(ValidationError::DurationOverflow));

        let tasks = [
            Task::new("A", f64::MAX / 4.0),
            Task::new("B", f64::MAX / 4.0).after(["A"]),
        ];
        let result = schedule(&tasks).unwrap();
        assert_eq!(result.project_duration(), f64::MAX / 2.0);
        assert_eq!(result.critical_path(), ["A", "B"]);
    }

    #[test]
    fn test_unknown_predecessor() {
        let tasks = [Task::new("A", 1.0).after(["Z"])];
        assert_eq!(
            schedule(&tasks),
            Err(ValidationError::UnknownPredecessor {
                task: "A".to_string(),
                predecessor: "Z".to_string(),
            })
        );
    }

    #[test]
    fn test_dependency_cycle() {
        let tasks = [
            Task::new("A", 1.0),
            Task::new("B", 1.0).after(["A", "C"]),
            Task::new("C", 1.0).after(["B"]),
            Task::new("D", 1.0).after(["C"]),
        ];
        let err = schedule(&tasks).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DependencyCycle {
                tasks: vec!["B".to_string(), "C".to_string(), "D".to_string()]
            }
        );
        assert_eq!(err.to_string(), "dependency cycle among tasks: B, C, D");
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let tasks = [Task::new("A", 1.0).after(["A"])];
        assert!(matches!(
            topological_order(&tasks),
            Err(ValidationError::DependencyCycle { .. })
        ));
    }

    #[test]
    fn test_validation_order() {
        // An invalid duration is reported before an unknown predecessor.
        let tasks = [Task::new("A", -2.0).after(["missing"])];
        assert!(matches!(
            schedule(&tasks),
            Err(ValidationError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_display_marks_critical_tasks() {
        let text = schedule(&demo::house_construction()).unwrap().to_string();
        assert!(text.contains("critical path: A -> B -> D -> F"));
        assert!(text.ends_with("project duration: 13"));
    }
}
