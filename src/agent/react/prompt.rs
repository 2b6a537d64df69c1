use indoc::indoc;

pub const OBSERVATION_PREFIX: &str = "Observation: ";
pub const LLM_PREFIX: &str = "Thought: ";

/// Stop sequence that keeps the model from writing its own observation.
pub const STOP_SEQUENCE: &str = "\nObservation";

/// Variables every ReAct template must contain.
pub const REQUIRED_VARIABLES: [&str; 4] = ["tools", "tool_names", "input", "agent_scratchpad"];

pub const DEFAULT_REACT_PROMPT: &str = indoc! {"
    Answer the following questions as best you can. You have access to the following tools:
    {tools}
    Use the following format:
    Question: the input question you must answer
    Thought: you should always think about what to do
    Action: the action to take, should be one of [{tool_names}]
    Action Input: the input to the action
    Observation: the result of the action
    ... (this Thought/Action/Action Input/Observation can repeat N times)
    Thought: I now know the final answer
    Final Answer: the final answer to the original input question
    Begin!
    Question: {input}
    Thought:{agent_scratchpad}"};
