// ABOUTME: Helper modules for fitter-cli
// ABOUTME: Provides terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
