use crate::config::ExecutionConfig;
use crate::error::{AnokiError, Result};
use crate::types::{ParsedCommand, Tool};
use rand::Rng;
use serde::Serialize;
use std::{thread, time::Duration};

pub const NOT_UNDERSTOOD_MESSAGE: &str =
    "I couldn't understand that command. Try one of the suggested commands or be more specific.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::Processing => "processing",
            StepStatus::Completed => "completed",
            StepStatus::Error => "error",
        }
    }

    fn can_become(self, next: StepStatus) -> bool {
        matches!(
            (self, next),
            (StepStatus::Pending, StepStatus::Processing)
                | (StepStatus::Processing, StepStatus::Completed)
                | (StepStatus::Processing, StepStatus::Error)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionStep {
    pub step: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPlan {
    pub steps: Vec<ExecutionStep>,
    pub tools: Vec<&'static Tool>,
    pub chain_name: Option<&'static str>,
    pub chain_description: Option<&'static str>,
}

impl ExecutionPlan {
    /// Parsed steps when there are any, else one "Use <tool>" step per tool.
    pub fn from_parsed(parsed: &ParsedCommand) -> Self {
        let labels: Vec<String> = if parsed.steps.is_empty() {
            parsed
                .tools
                .iter()
                .map(|t| format!("Use {}", t.name))
                .collect()
        } else {
            parsed.steps.clone()
        };

        Self {
            steps: labels
                .into_iter()
                .map(|step| ExecutionStep {
                    step,
                    status: StepStatus::Pending,
                })
                .collect(),
            tools: parsed.tools.clone(),
            chain_name: parsed.chain_name,
            chain_description: parsed.chain_description,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn transition(&mut self, index: usize, next: StepStatus) -> Result<()> {
        let step = self
            .steps
            .get_mut(index)
            .ok_or_else(|| AnokiError::Usage(format!("no step at index {index}")))?;
        if !step.status.can_become(next) {
            return Err(AnokiError::StepTransition {
                index,
                from: step.status.as_str(),
                to: next.as_str(),
            });
        }
        step.status = next;
        Ok(())
    }

    pub fn success_message(&self) -> String {
        match (self.chain_name, self.chain_description) {
            (Some(name), Some(description)) => {
                format!("Successfully executed \"{}\": {}", name, description)
            }
            _ => format!("Successfully executed {} tools in sequence", self.tools.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub success: bool,
    pub message: String,
}

/// Walks a plan step by step with a simulated processing delay.
pub struct Executor {
    min_step: Duration,
    max_step: Duration,
}

impl Executor {
    pub fn new(config: &ExecutionConfig) -> Self {
        let min_step = Duration::from_millis(config.min_step_ms);
        let max_step = Duration::from_millis(config.max_step_ms.max(config.min_step_ms));
        Self { min_step, max_step }
    }

    fn step_delay(&self) -> Duration {
        if self.max_step == self.min_step {
            return self.min_step;
        }
        rand::thread_rng().gen_range(self.min_step..=self.max_step)
    }

    /// Runs every step in order, reporting each transition to `observe`.
    pub fn run<F>(&self, plan: &mut ExecutionPlan, mut observe: F) -> Result<ExecutionOutcome>
    where
        F: FnMut(usize, &ExecutionStep),
    {
        if plan.is_empty() {
            return Ok(ExecutionOutcome {
                success: false,
                message: NOT_UNDERSTOOD_MESSAGE.to_string(),
            });
        }

        for i in 0..plan.steps.len() {
            plan.transition(i, StepStatus::Processing)?;
            observe(i, &plan.steps[i]);

            let delay = self.step_delay();
            if !delay.is_zero() {
                thread::sleep(delay);
            }

            plan.transition(i, StepStatus::Completed)?;
            observe(i, &plan.steps[i]);
        }

        Ok(ExecutionOutcome {
            success: true,
            message: plan.success_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::parse_command;

    fn instant() -> Executor {
        Executor::new(&ExecutionConfig {
            min_step_ms: 0,
            max_step_ms: 0,
        })
    }

    #[test]
    fn chain_plan_uses_chain_steps_and_message() {
        let parsed = parse_command("Check this text for plagiarism and improve its grammar");
        let mut plan = ExecutionPlan::from_parsed(&parsed);
        assert_eq!(plan.steps.len(), 2);

        let mut seen = Vec::new();
        let outcome = instant()
            .run(&mut plan, |i, step| seen.push((i, step.status)))
            .unwrap();

        assert!(outcome.success);
        assert_eq!(
            outcome.message,
            "Successfully executed \"Check Plagiarism and Enhance Text\": Checks text for plagiarism and enhances writing quality"
        );
        assert_eq!(
            seen,
            vec![
                (0, StepStatus::Processing),
                (0, StepStatus::Completed),
                (1, StepStatus::Processing),
                (1, StepStatus::Completed),
            ]
        );
        assert!(plan.steps.iter().all(|s| s.status == StepStatus::Completed));
    }

    #[test]
    fn stepless_plan_falls_back_to_tool_names() {
        let parsed = parse_command("chat and search");
        let mut plan = ExecutionPlan::from_parsed(&parsed);
        let labels: Vec<_> = plan.steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(labels, vec!["Use ChatGPT", "Use Perplexity"]);

        let outcome = instant().run(&mut plan, |_, _| {}).unwrap();
        assert_eq!(outcome.message, "Successfully executed 2 tools in sequence");
    }

    #[test]
    fn empty_plan_is_not_understood() {
        let mut plan = ExecutionPlan::from_parsed(&parse_command(""));
        let outcome = instant().run(&mut plan, |_, _| {}).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, NOT_UNDERSTOOD_MESSAGE);
    }

    #[test]
    fn out_of_order_transitions_are_rejected() {
        let mut plan = ExecutionPlan::from_parsed(&parse_command("chat"));
        assert!(matches!(
            plan.transition(0, StepStatus::Completed),
            Err(AnokiError::StepTransition { index: 0, .. })
        ));
        plan.transition(0, StepStatus::Processing).unwrap();
        plan.transition(0, StepStatus::Error).unwrap();
        assert!(plan.transition(0, StepStatus::Processing).is_err());
        assert!(plan.transition(3, StepStatus::Processing).is_err());
    }
}
