//! Process-name extraction over resolved, deduplicated links.

use super::link::ResolvedLink;

/// Names of processes feeding audio into the graph.
///
/// Keeps links whose input endpoint is an application. For each, emits the
/// output node's name when the output is also an application (a loopback
/// routing, where the consuming end is the interesting one), otherwise the
/// input node's name. Names are not deduplicated: one process with several
/// active streams appears once per stream.
#[must_use]
pub fn input_capture_process_names(links: &[ResolvedLink]) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.input.is_application)
        .map(|link| {
            if link.output.is_application {
                link.output.name.clone()
            } else {
                link.input.name.clone()
            }
        })
        .collect()
}

/// Names of processes capturing the microphone.
///
/// Keeps links whose input endpoint is an application and emits the input
/// node's name.
#[must_use]
pub fn microphone_access_processes(links: &[ResolvedLink]) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.input.is_application)
        .map(|link| link.input.name.clone())
        .collect()
}

/// Names of processes rendering to speakers.
///
/// Keeps links whose output endpoint is an application and emits the output
/// node's name.
#[must_use]
pub fn speaker_access_processes(links: &[ResolvedLink]) -> Vec<String> {
    links
        .iter()
        .filter(|link| link.output.is_application)
        .map(|link| link.output.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    fn app(id: u32, name: &str) -> Node {
        Node {
            id,
            name: name.to_string(),
            is_application: true,
            is_device: false,
        }
    }

    fn device(id: u32, name: &str) -> Node {
        Node {
            id,
            name: name.to_string(),
            is_application: false,
            is_device: true,
        }
    }

    fn link(input: Node, output: Node) -> ResolvedLink {
        ResolvedLink { input, output }
    }

    #[test]
    fn test_input_capture_prefers_output_name_on_loopback() {
        let links = [link(app(1, "Zoom"), app(2, "Recorder"))];
        assert_eq!(input_capture_process_names(&links), ["Recorder"]);
    }

    #[test]
    fn test_input_capture_uses_input_name_for_device_output() {
        let links = [link(app(1, "Zoom"), device(2, "Speakers"))];
        assert_eq!(input_capture_process_names(&links), ["Zoom"]);
    }

    #[test]
    fn test_input_capture_skips_device_inputs() {
        let links = [link(device(1, "Mic"), app(2, "Zoom"))];
        assert!(input_capture_process_names(&links).is_empty());
    }

    #[test]
    fn test_input_capture_keeps_repeated_names() {
        // Two streams from the same app stay as two entries.
        let links = [
            link(app(1, "Zoom"), device(9, "Speakers")),
            link(app(2, "Zoom"), device(9, "Speakers")),
        ];
        assert_eq!(input_capture_process_names(&links), ["Zoom", "Zoom"]);
    }

    #[test]
    fn test_microphone_access_emits_input_names() {
        let links = [
            link(app(1, "Zoom"), device(9, "Speakers")),
            link(device(2, "Mic"), app(3, "Firefox")),
        ];
        assert_eq!(microphone_access_processes(&links), ["Zoom"]);
    }

    #[test]
    fn test_speaker_access_emits_output_names() {
        let links = [
            link(device(2, "Mic"), app(3, "Firefox")),
            link(app(1, "Zoom"), device(9, "Speakers")),
        ];
        assert_eq!(speaker_access_processes(&links), ["Firefox"]);
    }

    #[test]
    fn test_classification_independent_of_direction() {
        // The same app node appears as input in one link and output in
        // another; its flags are identical in both positions.
        let zoom = app(1, "Zoom");
        let links = [
            link(zoom.clone(), device(9, "Speakers")),
            link(device(2, "Mic"), zoom.clone()),
        ];
        assert_eq!(microphone_access_processes(&links), ["Zoom"]);
        assert_eq!(speaker_access_processes(&links), ["Zoom"]);
    }
}
